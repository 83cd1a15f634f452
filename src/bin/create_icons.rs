// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    icongen::init_logger();

    let fontdb = icongen::load_system_fontdb();
    let dir = Path::new(icongen::ICONS_DIR);

    for &size in icongen::ICON_SIZES.iter() {
        let spec = icongen::IconSpec::drawn(dir, size);
        icongen::letter::create_icon(spec.size, &spec.output, &fontdb)?;
    }

    println!();
    println!("All icons created successfully!");
    Ok(())
}
