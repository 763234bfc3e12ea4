pub struct RegionCode {
}

impl RegionCode {
    /// Returns the region code libphonenumber uses for non-geographical
    /// entities, such as global freephone and satellite services.
    pub fn un001() -> &'static str {
        "001"
    }

    pub fn is_non_geo_entity(region_code: &str) -> bool {
        region_code == Self::un001()
    }
}
