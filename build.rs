use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    let config_path = "node_config.txt";
    println!("cargo:rerun-if-changed={}", config_path);

    let mut server = String::new();
    let mut port: u16 = 80;
    let mut networks: Vec<(String, String)> = Vec::new();
    let mut cert: Option<PathBuf> = None;

    // Read node configuration if it exists
    if Path::new(config_path).exists() {
        let contents = fs::read_to_string(config_path)?;

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                println!("cargo:warning=ignoring malformed line in {}: {}", config_path, line);
                continue;
            };
            let quoted: Vec<&str> = value.split('"').skip(1).step_by(2).collect();

            match key.trim() {
                "server" => {
                    if let Some(host) = quoted.first() {
                        server = host.to_string();
                    }
                }
                "port" => port = value.trim().parse()?,
                "network" => match quoted.as_slice() {
                    [ssid, password, ..] => networks.push((ssid.to_string(), password.to_string())),
                    [ssid] => networks.push((ssid.to_string(), String::new())),
                    [] => println!("cargo:warning=network line without ssid: {}", line),
                },
                "cert" => cert = quoted.first().map(PathBuf::from),
                other => println!("cargo:warning=unknown key '{}' in {}", other, config_path),
            }
        }
    } else {
        println!("cargo:warning=node_config.txt not found! Copy node_config.example.txt to node_config.txt and add your server and networks.");
    }

    if networks.is_empty() {
        println!("cargo:warning=no WiFi networks configured; the node will wait forever for one");
    }

    // PEM must be NUL-terminated for the ESP-IDF TLS stack
    let mut pem = match &cert {
        Some(path) => {
            println!("cargo:rerun-if-changed={}", path.display());
            fs::read_to_string(path)?
        }
        None => String::new(),
    };
    if !pem.is_empty() {
        pem.push('\0');
    }

    let mut generated = String::new();
    writeln!(generated, "pub const SERVER_HOST: &str = {:?};", server)?;
    writeln!(generated, "pub const SERVER_PORT: u16 = {};", port)?;
    writeln!(generated, "pub const SERVER_CERT: &str = {:?};", pem)?;
    writeln!(generated, "pub const NETWORKS: &[node_core::Candidate] = &[")?;
    for (ssid, password) in &networks {
        writeln!(
            generated,
            "    node_core::Candidate {{ ssid: {:?}, password: {:?} }},",
            ssid, password
        )?;
    }
    writeln!(generated, "];")?;

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("node_config.rs"), generated)?;

    Ok(())
}
