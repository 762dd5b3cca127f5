pub mod analysis;
pub mod correlation;
pub mod plot_spec;
pub mod regression;
pub mod statistics;
