pub mod city;
pub mod dataset;
pub mod filter;
pub mod trip;
