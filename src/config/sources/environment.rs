//! Environment source: RUNENV__SECTION__FIELD overrides any file value.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("RUNENV")
            .prefix_separator("__")
            .separator("__"),
    )
}
