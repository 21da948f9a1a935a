pub mod batch;
pub mod network;
pub mod prober;
