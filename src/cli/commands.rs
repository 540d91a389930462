use anyhow::Result;

use flatconf::{ConfigStore, ValueType};

use super::args::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let store = match &cli.overlay {
        Some(overlay) => ConfigStore::load_with_overlay(&cli.defaults, overlay),
        None => ConfigStore::load(&cli.defaults),
    };

    let Some(key) = cli.get.as_deref() else {
        store.print_configuration();
        return Ok(());
    };

    match cli.value_type.parse::<ValueType>()? {
        ValueType::Integer => println!("{}", store.get_int(key)),
        ValueType::Float => println!("{}", store.get_float(key)),
        ValueType::String => println!("{}", store.get_string(key)),
        ValueType::Boolean => println!("{}", store.get_bool(key)),
    }
    Ok(())
}
