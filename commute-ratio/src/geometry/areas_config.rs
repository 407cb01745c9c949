use serde::{Deserialize, Serialize};

/// inputs for loading the census areas of one municipality
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AreasConfig {
    /// polygon shapefile of the fine-grained areas (census tracts, dissemination areas)
    pub area_file: String,
    /// attribute identifying each area
    #[serde(default = "AreasConfig::default_area_id_field")]
    pub area_id_field: String,
    /// polygon shapefile of municipal boundaries
    pub boundary_file: String,
    /// attribute holding the municipality name
    #[serde(default = "AreasConfig::default_boundary_name_field")]
    pub boundary_name_field: String,
    pub municipality_name: String,
    /// caps the number of areas, in file order, to limit API usage
    #[serde(default)]
    pub max_areas: Option<usize>,
    /// proj4 definition of the input datasets' coordinate reference system.
    /// when omitted the inputs must already be WGS84 longitude/latitude.
    #[serde(default)]
    pub source_crs: Option<String>,
}

impl AreasConfig {
    fn default_area_id_field() -> String {
        String::from("DAUID")
    }

    fn default_boundary_name_field() -> String {
        String::from("CDNAME")
    }
}
