use hill_crypto::errors::HillCipherError;
use hill_crypto::matrix::Matrix;
use hill_crypto::preset::letter_alphabet;
use hill_crypto::{decrypt, encrypt};

#[test]
fn happy_flow() -> Result<(), HillCipherError> {
    let key = Matrix::from_i64_rows(vec![vec![3, 3], vec![2, 5]])?;
    let plaintext = Matrix::from_i64_rows(vec![vec![19], vec![13]])?;

    let ciphertext = encrypt(&plaintext, &key, 26)?;
    assert_eq!(ciphertext, Matrix::from_i64_rows(vec![vec![18], vec![25]])?);

    let decoded = decrypt(&ciphertext, &key, 26)?;
    assert_eq!(decoded, plaintext);

    Ok(())
}

#[test]
fn text_round_trip_with_three_by_three_key() -> Result<(), HillCipherError> {
    let alphabet = letter_alphabet()?;
    // det = 441 = 3^2 * 7^2, coprime with 29
    let key = Matrix::from_i64_rows(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]])?;

    let original = "ATTACK AT DAWN!";
    let plaintext = alphabet.to_matrix(original, key.rows(), 10)?;
    let ciphertext = encrypt(&plaintext, &key, alphabet.modulus())?;
    let encrypted_text = alphabet.to_text(&ciphertext)?;
    assert_ne!(encrypted_text, original);

    let decoded = decrypt(&ciphertext, &key, alphabet.modulus())?;
    assert_eq!(alphabet.to_text(&decoded)?, original);

    Ok(())
}

#[test]
fn rejects_key_sharing_a_factor_with_the_modulus() -> Result<(), HillCipherError> {
    // det = 2, modulus 4
    let key = Matrix::from_i64_rows(vec![vec![2, 1], vec![0, 1]])?;
    let plaintext = Matrix::from_i64_rows(vec![vec![1, 2], vec![3, 0]])?;

    let result = encrypt(&plaintext, &key, 4);
    assert!(matches!(
        result,
        Err(HillCipherError::NonInvertibleKey { gcd: 2, .. })
    ));

    Ok(())
}

#[test]
fn error_messages_name_the_problem() -> Result<(), HillCipherError> {
    let key = Matrix::from_i64_rows(vec![vec![2, 0], vec![0, 2]])?;
    let plaintext = Matrix::from_i64_rows(vec![vec![1], vec![1]])?;

    let err = encrypt(&plaintext, &key, 26).unwrap_err();
    assert_eq!(
        err.to_string(),
        "NonInvertibleKey: determinant 4 shares factor 2 with modulus 26"
    );

    let err = Matrix::from_i64_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RaggedInput: row 1 has length 1 but expected 2"
    );

    Ok(())
}
