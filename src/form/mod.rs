// src/form/mod.rs
//! Form synchronizer: render the document into positional form fields and
//! read edits back into a full replacement document.

pub mod collect;
pub mod fields;
pub mod mutate;
pub mod render;

pub use collect::{collect, entry_count};
pub use fields::{field_name, item_field_name, FormFields, Section};
pub use mutate::{add_entry, add_item, remove_entry, remove_item, section_len};
pub use render::{render_form, render_personal_info, render_section, FORM_ID};
