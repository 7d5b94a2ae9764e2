mod load_dotenv;

pub use load_dotenv::load_dotenv;

pub mod settings;
