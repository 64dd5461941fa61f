mod field_allow_list;

pub use field_allow_list::FieldAllowList;
