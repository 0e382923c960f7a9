use std::error::Error;
use std::fs;
use std::path::Path;

use hill_crypto::preset::{letter_alphabet, reference_key};
use hill_crypto::ring::checked_extended_gcd;
use hill_crypto::{Alphabet, Matrix, decrypt, encrypt};

type CliResult<T> = Result<T, Box<dyn Error>>;

const DEMO_MESSAGE: &str = "THIS IS AN ENCRYPTED MESSAGE. WE WILL ATTACK AT DAWN. DONT BE LATE";

fn load_key(path: Option<&Path>) -> CliResult<Matrix> {
    let key = match path {
        Some(path) => {
            log::debug!("Reading key from {}", path.display());
            Matrix::from_json(&fs::read_to_string(path)?)?
        }
        None => reference_key()?,
    };

    log::debug!("Key is {}x{}", key.rows(), key.cols());
    Ok(key)
}

fn describe_key(key: &Matrix, alphabet: &Alphabet) -> CliResult<()> {
    let det = key.determinant()?;
    let (g, _, _) = checked_extended_gcd(det, alphabet.modulus() as f64)?;
    log::debug!(
        "Key determinant {} has gcd {} with modulus {}",
        det,
        g,
        alphabet.modulus()
    );
    Ok(())
}

pub fn run_demo(fill: u32) -> CliResult<()> {
    let alphabet = letter_alphabet()?;
    let key = load_key(None)?;
    describe_key(&key, &alphabet)?;

    let message = alphabet.to_matrix(DEMO_MESSAGE, key.rows(), fill)?;
    let encrypted = encrypt(&message, &key, alphabet.modulus())?;
    let decrypted = decrypt(&encrypted, &key, alphabet.modulus())?;

    println!("Message: {}", alphabet.to_text(&message)?);
    print!("Key:\n{}", key);
    println!("Encrypted: {}", alphabet.to_text(&encrypted)?);
    println!("Decrypted: {}", alphabet.to_text(&decrypted)?);

    if decrypted != message {
        return Err("decrypted matrix differs from the message".into());
    }
    Ok(())
}

pub fn run_encrypt(message: &str, key_path: Option<&Path>, fill: u32) -> CliResult<()> {
    let alphabet = letter_alphabet()?;
    let key = load_key(key_path)?;
    describe_key(&key, &alphabet)?;

    let plaintext = alphabet.to_matrix(message, key.rows(), fill)?;
    log::debug!("Message laid out as {} blocks", plaintext.cols());

    let ciphertext = encrypt(&plaintext, &key, alphabet.modulus())?;
    println!("{}", alphabet.to_text(&ciphertext)?);
    Ok(())
}

pub fn run_decrypt(message: &str, key_path: Option<&Path>, fill: u32) -> CliResult<()> {
    let alphabet = letter_alphabet()?;
    let key = load_key(key_path)?;
    describe_key(&key, &alphabet)?;

    if message.chars().count() % key.rows() != 0 {
        log::warn!(
            "Ciphertext length is not a multiple of {}; the last block is padded before decrypting",
            key.rows()
        );
    }

    let ciphertext = alphabet.to_matrix(message, key.rows(), fill)?;
    let plaintext = decrypt(&ciphertext, &key, alphabet.modulus())?;
    println!("{}", alphabet.to_text(&plaintext)?);
    Ok(())
}
