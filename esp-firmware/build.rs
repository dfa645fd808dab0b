// Build-Script der Ziffern-Matrix Firmware
//
// Registriert die Linker-Skripte für defmt und das ESP32-C6 Speicher-Layout
// und hängt sich als Fehler-Skript in den Linker ein.

/// Tipps für fehlende Symbole: (Präfix, Hinweis)
const LINKER_HINTS: &[(&str, &str)] = &[
    (
        "_defmt_",
        "`defmt` not found - is `defmt.x` linked and `esp-println` built with `defmt-espflash`?",
    ),
    ("_stack_start", "Is the linker script `linkall.x` missing?"),
    (
        "esp_rtos_",
        "`esp-rtos` is not started - call `esp_rtos::start()` before spawning tasks.",
    ),
    (
        "esp_app_desc",
        "App descriptor missing - keep `esp_bootloader_esp_idf::esp_app_desc!()` in main.rs.",
    ),
];

fn main() {
    // Aufruf durch den Linker: args = [exe, Fehler-Typ, Symbol]
    let args: Vec<String> = std::env::args().collect();
    if let [_, kind, symbol, ..] = args.as_slice() {
        std::process::exit(report_link_error(kind, symbol));
    }

    // defmt.x vor linkall.x, linkall.x muss als letztes kommen
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");

    let exe = std::env::current_exe().expect("build script path");
    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        exe.display()
    );
}

/// Gibt den passenden Tipp aus und liefert den Exit-Code für den Linker
fn report_link_error(kind: &str, symbol: &str) -> i32 {
    if kind != "undefined-symbol" {
        return 1;
    }

    if let Some((_, hint)) = LINKER_HINTS
        .iter()
        .find(|(prefix, _)| symbol.starts_with(prefix))
    {
        eprintln!();
        eprintln!("💡 {hint}");
        eprintln!();
    }
    0
}
