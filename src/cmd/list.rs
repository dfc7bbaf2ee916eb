use anyhow::Result;

use crate::pm::{PackageManager, PACKAGE_MANAGERS};

pub fn cmd_list(json: bool) -> Result<i32> {
    if json {
        println!("{}", serde_json::to_string_pretty(&PACKAGE_MANAGERS[..])?);
        return Ok(0);
    }

    for m in (0..PACKAGE_MANAGERS.len()).filter_map(PackageManager::from_index) {
        println!("{}  {:<4}  {}", m.index(), m.name(), m.add_command());
    }
    Ok(0)
}
