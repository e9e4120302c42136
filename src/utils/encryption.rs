//! 值加密模块
//!
//! 口令经 scrypt 派生出 32 字节密钥，对单个字符串做 AES-256-CBC 加密。
//! 令牌格式：base64(IV || 密文)，IV 每次随机生成。

use crate::domain::models::{EncryptionConfig, Environment};
use crate::error::{EnvSyncError, Result};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use rand::rngs::OsRng;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// 固定盐：已有备份依赖它，修改会导致无法解密
const KDF_SALT: &[u8] = b"salt";
/// scrypt 参数 N = 2^14, r = 8, p = 1
const KDF_LOG_N: u8 = 14;
const KDF_R: u32 = 8;
const KDF_P: u32 = 1;

/// 值加密服务
pub struct EncryptionService {
    key: [u8; KEY_LEN],
}

impl std::fmt::Debug for EncryptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionService").finish_non_exhaustive()
    }
}

impl EncryptionService {
    /// 从口令创建；空口令返回 `MissingKey`
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(EnvSyncError::MissingKey);
        }
        Ok(Self {
            key: derive_key(secret)?,
        })
    }

    /// 按项目配置创建：未启用加密时返回 None
    pub fn from_config(config: &EncryptionConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }
        match config.key.as_deref() {
            Some(secret) => Self::new(secret).map(Some),
            None => Err(EnvSyncError::MissingKey),
        }
    }

    /// 加密明文，返回令牌
    ///
    /// 同一明文多次加密得到不同令牌。
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut iv = [0u8; IV_LEN];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|e| EnvSyncError::EncryptionFailed(e.to_string()))?;

        let ciphertext = Aes256CbcEnc::new(&self.key.into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut token = Vec::with_capacity(IV_LEN + ciphertext.len());
        token.extend_from_slice(&iv);
        token.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(token))
    }

    /// 解密令牌
    ///
    /// 格式错误、密钥不符或密文损坏都返回 `DecryptionFailed`，不返回部分明文。
    pub fn decrypt(&self, token: &str) -> Result<String> {
        let raw = STANDARD
            .decode(token.trim())
            .map_err(|e| EnvSyncError::DecryptionFailed(format!("无效的 base64: {e}")))?;

        if raw.len() < IV_LEN * 2 || (raw.len() - IV_LEN) % IV_LEN != 0 {
            return Err(EnvSyncError::DecryptionFailed(format!(
                "令牌长度无效: {} 字节",
                raw.len()
            )));
        }

        let (iv, ciphertext) = raw.split_at(IV_LEN);
        let mut iv_block = [0u8; IV_LEN];
        iv_block.copy_from_slice(iv);

        let plaintext = Aes256CbcDec::new(&self.key.into(), &iv_block.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| EnvSyncError::DecryptionFailed("填充校验失败（密钥错误或数据损坏）".into()))?;

        String::from_utf8(plaintext)
            .map_err(|_| EnvSyncError::DecryptionFailed("明文不是有效的 UTF-8".into()))
    }

    /// 生成新的随机密钥（64 位十六进制）
    pub fn generate_key(&self) -> String {
        generate_secret_key()
    }

    /// 加密环境中所有尚未加密的变量
    pub fn encrypt_environment(&self, environment: &Environment) -> Result<Environment> {
        let mut encrypted = environment.clone();
        for var in encrypted.variables.iter_mut().filter(|v| !v.encrypted) {
            var.value = self.encrypt(&var.value)?;
            var.encrypted = true;
        }
        Ok(encrypted)
    }

    /// 解密环境中所有标记为加密的变量
    pub fn decrypt_environment(&self, environment: &Environment) -> Result<Environment> {
        let mut decrypted = environment.clone();
        for var in decrypted.variables.iter_mut().filter(|v| v.encrypted) {
            var.value = self.decrypt(&var.value)?;
            var.encrypted = false;
        }
        Ok(decrypted)
    }
}

/// 生成 32 字节随机密钥，渲染为 64 位十六进制
#[must_use]
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn derive_key(secret: &str) -> Result<[u8; KEY_LEN]> {
    let params = scrypt::Params::new(KDF_LOG_N, KDF_R, KDF_P, KEY_LEN)
        .map_err(|e| EnvSyncError::EncryptionFailed(format!("scrypt 参数无效: {e}")))?;

    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(secret.as_bytes(), KDF_SALT, &params, &mut key)
        .map_err(|e| EnvSyncError::EncryptionFailed(format!("密钥派生失败: {e}")))?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EnvironmentVariable;

    fn service(secret: &str) -> EncryptionService {
        EncryptionService::new(secret).unwrap()
    }

    #[test]
    fn test_missing_key() {
        assert!(matches!(
            EncryptionService::new(""),
            Err(EnvSyncError::MissingKey)
        ));
    }

    #[test]
    fn test_encrypt_decrypt_cycle() {
        let encryptor = service("correct horse battery staple");
        let long = "x".repeat(1000);
        for original in ["test_secret_value_12345", "", "多字节 ✓", long.as_str()] {
            let token = encryptor.encrypt(original).unwrap();
            assert_eq!(encryptor.decrypt(&token).unwrap(), original);
        }
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let encryptor = service("k");
        let a = encryptor.encrypt("same").unwrap();
        let b = encryptor.encrypt("same").unwrap();
        assert_ne!(a, b);
        assert_eq!(encryptor.decrypt(&a).unwrap(), encryptor.decrypt(&b).unwrap());
    }

    #[test]
    fn test_token_layout() {
        let encryptor = service("k");
        let raw = STANDARD.decode(encryptor.encrypt("").unwrap()).unwrap();
        // IV + 一个填充块
        assert_eq!(raw.len(), 32);

        let raw = STANDARD.decode(encryptor.encrypt("0123456789abcdef").unwrap()).unwrap();
        assert_eq!(raw.len(), 48);
    }

    #[test]
    fn test_same_secret_derives_same_key() {
        let token = service("shared").encrypt("value").unwrap();
        assert_eq!(service("shared").decrypt(&token).unwrap(), "value");
    }

    #[test]
    fn test_wrong_key_fails() {
        let token = service("key-one").encrypt("a fairly long secret value").unwrap();
        assert!(matches!(
            service("key-two").decrypt(&token),
            Err(EnvSyncError::DecryptionFailed(_))
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        let encryptor = service("k");
        let short = STANDARD.encode([0u8; 20]);
        for token in ["not base64!!", "", "AAAA", short.as_str()] {
            assert!(
                matches!(encryptor.decrypt(token), Err(EnvSyncError::DecryptionFailed(_))),
                "token {token:?} should fail"
            );
        }
    }

    #[test]
    fn test_corrupted_ciphertext() {
        let encryptor = service("k");
        let mut raw = STANDARD
            .decode(encryptor.encrypt("a fairly long secret value").unwrap())
            .unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xff;
        assert!(encryptor.decrypt(&STANDARD.encode(raw)).is_err());
    }

    #[test]
    fn test_generate_secret_key() {
        let a = generate_secret_key();
        let b = service("k").generate_key();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_config() {
        let disabled = EncryptionConfig::default();
        assert!(EncryptionService::from_config(&disabled).unwrap().is_none());

        let no_key = EncryptionConfig {
            enabled: true,
            key: None,
        };
        assert!(matches!(
            EncryptionService::from_config(&no_key),
            Err(EnvSyncError::MissingKey)
        ));

        let with_key = EncryptionConfig {
            enabled: true,
            key: Some("k".into()),
        };
        assert!(EncryptionService::from_config(&with_key).unwrap().is_some());
    }

    #[test]
    fn test_environment_helpers() {
        let encryptor = service("k");
        let mut env = Environment::empty("dev");
        env.variables.push(EnvironmentVariable::new("A", "1"));
        env.variables.push(EnvironmentVariable::new("B", ""));

        let sealed = encryptor.encrypt_environment(&env).unwrap();
        assert!(sealed.variables.iter().all(|v| v.encrypted && v.value != "1"));

        // 已加密的值不会再次加密
        let twice = encryptor.encrypt_environment(&sealed).unwrap();
        assert_eq!(twice.variables, sealed.variables);

        let opened = encryptor.decrypt_environment(&sealed).unwrap();
        assert_eq!(opened.variables, env.variables);
    }
}
