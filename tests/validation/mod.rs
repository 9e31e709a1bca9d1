mod known_argument_names;
mod properties;
mod unique_enum_value_names;
mod unique_input_field_names;
