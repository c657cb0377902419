pub mod cli;
pub mod test_networks;
