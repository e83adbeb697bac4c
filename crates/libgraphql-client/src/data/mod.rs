mod data_decode_error;
mod data_dict;
mod field_decoder;
mod field_shape;
mod field_value;
mod response_path;

pub use data_decode_error::DataDecodeError;
pub use data_decode_error::RawValueKind;
pub use data_dict::DataDict;
pub use data_dict::JSONObject;
pub use data_dict::Variables;
pub use field_decoder::DecodedValue;
pub use field_shape::FieldShape;
pub use field_shape::ScalarKind;
pub use field_value::FieldValue;
pub use field_value::Id;
pub use response_path::ResponsePath;
pub use response_path::ResponsePathSegment;

#[cfg(test)]
mod tests;
