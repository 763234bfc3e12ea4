use phonenumber::country;

pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ch() -> country::Id {
        country::CH
    }

    pub fn es() -> country::Id {
        country::ES
    }

    pub fn gb() -> country::Id {
        country::GB
    }

    pub fn us() -> country::Id {
        country::US
    }
}
