// Domain layer: the send outcome and the port interface. No serial library types here.

pub mod model;
pub mod ports;
