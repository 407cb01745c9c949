mod ratio_ops;

pub use ratio_ops::transit_to_drive_ratio;
