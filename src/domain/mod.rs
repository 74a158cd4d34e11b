// Domain layer: models, ports and the site's static reference data.

pub mod areas;
pub mod catalog;
pub mod contact;
pub mod model;
pub mod options;
pub mod ports;
