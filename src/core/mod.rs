//! # Core Data Model
//!
//! Dynamically typed message values and the serializer bridge that produces them.
//!
//! ## Components
//! - **Value**: tagged union for decoded fields with fallible, typed extraction
//! - **Serialization**: JSON / MessagePack payload <-> `Vec<Value>` adapter
//!
//! ## Wire Shape
//! ```text
//! [TypeCode(int), Field1, Field2, ...]
//! ```

pub mod serialization;
pub mod value;
