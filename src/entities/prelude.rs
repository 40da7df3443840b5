pub use super::series::Entity as Series;
