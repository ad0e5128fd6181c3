pub mod checkout_reader;
pub mod checkout_writer;
