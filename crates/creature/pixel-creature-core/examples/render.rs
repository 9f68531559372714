//! Print a creature SVG to stdout.
//!
//! ```text
//! cargo run -p pixel-creature-core --example render -- Mochi        # random variation
//! cargo run -p pixel-creature-core --example render -- Mochi 0      # fixed variation
//! ```

use pixel_creature_core::{generate, Generator};

fn main() {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Mochi".to_string());
    let svg = match args.next() {
        Some(seed) => match seed.parse::<u32>() {
            Ok(seed) => Generator::default().generate_with_seed(&name, seed),
            Err(err) => {
                eprintln!("invalid variation seed '{seed}': {err}");
                std::process::exit(2);
            }
        },
        None => generate(&name),
    };
    println!("{svg}");
}
