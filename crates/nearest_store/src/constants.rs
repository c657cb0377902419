/// Road distance type
pub type Weight = road_reader::Distance;
/// Identifier of a city, unique across the road network
pub type CityId = String;
/// Weight of a city that has not been reached (yet)
pub const INFINITY: Weight = Weight::MAX;
