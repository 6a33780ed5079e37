//! Identifier transformations shared by target descriptors.

/// Replace every character that cannot appear in an identifier with `_`.
///
/// Letters, digits and underscores are kept as they are.
pub fn sanitize_name(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Convert a string to lowercase_with_underscores
/// (e.g., "getPetById" -> "get_pet_by_id", "Pet Store" -> "pet_store").
///
/// A word boundary is inserted before an uppercase letter that follows a
/// lowercase letter or digit, and before the last uppercase letter of an
/// acronym that is followed by a lowercase letter ("HTTPServer" -> "http_server").
/// Dashes and spaces become underscores.
pub fn underscore(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut result = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            result.push('_');
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    result
}

/// Convert a string to CamelCase (e.g., "pet_id" -> "PetId", "petId" -> "PetId").
///
/// Underscores, dashes and spaces separate words; the rest of each word is
/// kept as it is.
pub fn camelize(word: &str) -> String {
    word.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("getPet"), "getPet");
        assert_eq!(sanitize_name("pet-store"), "pet_store");
        assert_eq!(sanitize_name("get /pets/{id}"), "get__pets__id_");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("getPet"), "get_pet");
        assert_eq!(underscore("findPetsByStatus"), "find_pets_by_status");
        assert_eq!(underscore("Pet Store"), "pet_store");
        assert_eq!(underscore("pet-store"), "pet_store");
        assert_eq!(underscore("HTTPServer"), "http_server");
        assert_eq!(underscore("v2Api"), "v2_api");
        assert_eq!(underscore("Pet_Store"), "pet_store");
        assert_eq!(underscore("call_receive"), "call_receive");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("pet_id"), "PetId");
        assert_eq!(camelize("petId"), "PetId");
        assert_eq!(camelize("api-key"), "ApiKey");
        assert_eq!(camelize("end"), "End");
        assert_eq!(camelize(""), "");
    }
}
