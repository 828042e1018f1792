pub mod feature_flags;
