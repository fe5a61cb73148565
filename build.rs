use std::fs;

const SITE_KEYS: [&str; 5] = ["content_dir", "static_dir", "output_dir", "template", "basepath"];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // Must deserialize into `Config { site: SiteConfig }`.
    let Some(site) = table.get("site").and_then(toml::Value::as_table) else {
        panic!("default_config.toml needs a [site] table");
    };
    for (key, value) in site {
        if !SITE_KEYS.contains(&key.as_str()) {
            panic!("default_config.toml: unknown [site] key `{}`", key);
        }
        if !value.is_str() {
            panic!("default_config.toml: [site] `{}` must be a string", key);
        }
    }
}
