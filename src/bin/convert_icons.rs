// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;
use std::sync::Arc;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    icongen::init_logger();

    let mut opt = usvg::Options::default();
    opt.fontdb = Arc::new(icongen::load_system_fontdb());

    let specs = icongen::converter_set(Path::new(icongen::ICONS_DIR));
    icongen::convert::convert_all(&specs, &opt)?;

    println!();
    println!("All icons converted!");
    Ok(())
}
