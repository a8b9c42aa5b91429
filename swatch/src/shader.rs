use std::{ffi::CStr, fmt, io, str::FromStr};

use ash::util::read_spv;

#[cfg(feature = "compile-shaders")]
pub const TINTED_SHADER: &[u8] = include_bytes!(env!("tinted.spv"));
#[cfg(feature = "compile-shaders")]
pub const CHECKERBOARD_SHADER: &[u8] = include_bytes!(env!("checkerboard.spv"));

pub const SPIRV_MAGIC: u32 = 0x0723_0203;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Tinted,
    Checkerboard,
}

impl ShaderKind {
    pub const ALL: [ShaderKind; 2] = [ShaderKind::Tinted, ShaderKind::Checkerboard];

    /// Name of the shader crate under `shaders/`.
    pub fn name(self) -> &'static str {
        match self {
            ShaderKind::Tinted => "tinted",
            ShaderKind::Checkerboard => "checkerboard",
        }
    }

    pub fn entry_point(self) -> &'static CStr {
        c"main_fs"
    }

    #[cfg(feature = "compile-shaders")]
    pub fn spirv(self) -> &'static [u8] {
        match self {
            ShaderKind::Tinted => TINTED_SHADER,
            ShaderKind::Checkerboard => CHECKERBOARD_SHADER,
        }
    }

    /// The embedded module as words, ready for `vk::ShaderModuleCreateInfo::code`.
    #[cfg(feature = "compile-shaders")]
    pub fn module(self) -> Result<Vec<u32>, ShaderError> {
        let words = module_words(self.spirv())?;
        log::debug!("swatch::shader - loaded {self} ({} words)", words.len());
        Ok(words)
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShaderKind {
    type Err = ShaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShaderKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ShaderError::UnknownShader(s.to_owned()))
    }
}

#[derive(Debug)]
pub enum ShaderError {
    UnknownShader(String),
    Read(io::Error),
    Empty,
    BadMagic(u32),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::UnknownShader(name) => write!(f, "unknown shader `{name}`"),
            ShaderError::Read(err) => write!(f, "failed to read SPIR-V module: {err}"),
            ShaderError::Empty => f.write_str("SPIR-V module is empty"),
            ShaderError::BadMagic(word) => write!(f, "bad SPIR-V magic number {word:#010x}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Read(err) => Some(err),
            _ => None,
        }
    }
}

/// Decodes a SPIR-V binary into native-endian words, as `vkCreateShaderModule` expects.
///
/// `read_spv` fixes the byte order but accepts any leading word, so the magic is checked here.
pub fn module_words(code: &[u8]) -> Result<Vec<u32>, ShaderError> {
    let words = read_spv(&mut io::Cursor::new(code)).map_err(ShaderError::Read)?;

    match words.first() {
        None => Err(ShaderError::Empty),
        Some(&SPIRV_MAGIC) => Ok(words),
        Some(&magic) => Err(ShaderError::BadMagic(magic)),
    }
}
