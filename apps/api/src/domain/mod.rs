pub mod city;
pub mod environment;
pub mod risk;
pub mod session;
pub mod shared;
pub mod ward;
