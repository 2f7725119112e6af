// Domain layer: account records and the ports the collator drives.

pub mod model;
pub mod ports;
