pub mod checkout;
pub mod ports;
pub mod reference;
pub mod signature;
