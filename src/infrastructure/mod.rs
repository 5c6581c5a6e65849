pub mod fixture_gateway;
