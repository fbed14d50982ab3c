pub mod geography;
pub mod split;
pub mod taxon;
