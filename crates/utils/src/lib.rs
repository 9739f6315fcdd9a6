use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                         0123456789";

/// Lowercase alphanumeric string of `len` characters. Used as the collision
/// breaking suffix of generated identifiers.
pub fn create_random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
