/// Data layer: record model, catalog store, filtering, sorting, validation.
///
/// Architecture:
/// ```text
///  materials_data.csv
///        │ load / save
///        ▼
///   ┌──────────┐
///   │  store    │  CSV ⇄ Vec<MaterialRecord>, append with dup check
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  ten range criteria + type set → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  stable order by a chosen property
///   └──────────┘
/// ```
/// `validate` feeds the store from the add-record form. Everything here is
/// plain data and functions; no egui types, so it tests without a window.

pub mod filter;
pub mod model;
pub mod sort;
pub mod store;
pub mod validate;
