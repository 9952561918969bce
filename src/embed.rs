/// Hex literals per line in the generated module.
pub const BYTES_PER_LINE: usize = 12;

// Continuation indent inside the Uint8Array literal.
const LINE_INDENT: &str = "        ";

/// Renders the firmware as the TypeScript module the frontend bundles.
///
/// The payload becomes a `Uint8Array` literal of two-digit uppercase hex
/// bytes, twelve per line, exported with the artifact's file name attached.
pub fn render_module(artifact_name: &str, data: &[u8]) -> String {
    let mut module = String::with_capacity(data.len() * 6 + 256);
    module.push_str("// Embedded MicroPython firmware for ESP32-C3\n");
    module.push_str("export const MICROPYTHON_FIRMWARE = {\n");
    module.push_str(&format!("    name: '{}',\n", artifact_name));
    module.push_str("    data: new Uint8Array([\n");
    module.push_str(LINE_INDENT);
    module.push_str(&hex_lines(data));
    module.push('\n');
    module.push_str("    ]).buffer\n");
    module.push_str("};");
    module
}

/// Formats `data` as `0x`-prefixed uppercase hex literals, twelve per line,
/// lines joined with a comma and the continuation indent.
pub fn hex_lines(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 6);
    for (i, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(LINE_INDENT);
        }
        for (j, byte) in chunk.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("0x{:02X}", byte));
        }
    }
    out
}
