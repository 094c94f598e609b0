use phf::{Map, phf_map};

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    // Common variants and modified residues
    "HSE" => 'H', "HSP" => 'H', "HSD" => 'H', "HID" => 'H', "HIE" => 'H',
    "HIP" => 'H', "CYX" => 'C', "MSE" => 'M', "SEC" => 'U', "PYL" => 'O',
};

/// Maps a three-letter residue name to its one-letter sequence code.
///
/// The name is trimmed and upper-cased before lookup; unknown names map to
/// `'X'`, the conventional wildcard code.
pub fn one_letter_code(name: &str) -> char {
    THREE_TO_ONE
        .get(name.trim().to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or('X')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_code_maps_standard_residues() {
        assert_eq!(one_letter_code("ALA"), 'A');
        assert_eq!(one_letter_code("TRP"), 'W');
        assert_eq!(one_letter_code("GLY"), 'G');
    }

    #[test]
    fn one_letter_code_normalizes_case_and_whitespace() {
        assert_eq!(one_letter_code(" ala "), 'A');
        assert_eq!(one_letter_code("lys"), 'K');
    }

    #[test]
    fn one_letter_code_maps_histidine_variants() {
        for name in ["HIS", "HSE", "HSP", "HSD", "HID", "HIE", "HIP"] {
            assert_eq!(one_letter_code(name), 'H', "variant {name}");
        }
    }

    #[test]
    fn one_letter_code_falls_back_to_x_for_unknown_names() {
        assert_eq!(one_letter_code("LIG"), 'X');
        assert_eq!(one_letter_code(""), 'X');
    }
}
