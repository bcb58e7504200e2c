mod raw_type_descriptor;
mod type_descriptor;
mod type_descriptor_parse_error;

pub use raw_type_descriptor::build_raw_type;
pub use raw_type_descriptor::RawTypeDescriptor;
pub use type_descriptor::build_type;
pub use type_descriptor::TypeDescriptor;
pub use type_descriptor_parse_error::TypeDescriptorParseError;
