use std::path::Path;

fn main() {
    let mask_path = Path::new("data/lane_mask.txt");
    validate_mask_file(mask_path);
    set_build_dependencies();
}

fn validate_mask_file(mask_path: &Path) {
    // Ensure the mask exists at build time
    assert!(
        mask_path.exists(),
        "\n\nLANE MASK BUILD ERROR: File not found\n\
         Path: {}\n\
         Please restore the lane mask file before building.\n",
        mask_path.display()
    );

    let mask = std::fs::read_to_string(mask_path).unwrap_or_else(|e| {
        panic!(
            "\n\nLANE MASK BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            mask_path.display()
        );
    });

    validate_mask_contents(&mask);
}

fn validate_mask_contents(mask: &str) {
    assert!(
        !mask.is_empty(),
        "\n\nLANE MASK BUILD ERROR: Mask is empty\n"
    );

    assert!(
        !mask.ends_with('\n') && !mask.ends_with('\r'),
        "\n\nLANE MASK BUILD ERROR: Trailing line terminator\n\
         The mask is embedded verbatim and must not end with a newline.\n"
    );

    if let Some((column, c)) = mask.chars().enumerate().find(|(_, c)| *c != '0' && *c != '1') {
        panic!(
            "\n\nLANE MASK BUILD ERROR: Invalid character {c:?} at column {column}\n\
             Only '0' and '1' are allowed.\n"
        );
    }

    let informative = mask.bytes().filter(|b| *b == b'1').count();
    println!(
        "cargo:warning=Validated lane mask: {} columns, {informative} informative",
        mask.len()
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the mask changes
    println!("cargo:rerun-if-changed=data/lane_mask.txt");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
