pub mod revenue;
