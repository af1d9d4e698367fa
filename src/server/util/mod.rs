pub mod cpf;
pub mod parse;
