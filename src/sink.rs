use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use log::info;

pub const DEFAULT_OUTPUT: &str = "output.c";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Write the generated program verbatim, followed by one newline.
pub fn write_output(code: &str, destination: &Destination) -> io::Result<()> {
    match destination {
        Destination::File(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", code)?;
            file.flush()?;
        }
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{}", code)?;
            lock.flush()?;
        }
    }
    info!("wrote {} bytes to {}", code.len() + 1, destination);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_gets_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");

        write_output("int main() {}", &Destination::File(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "int main() {}\n");
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        fs::write(&path, "old contents that are longer").unwrap();

        write_output("new", &Destination::File(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::Stdout.to_string(), "<stdout>");
        assert_eq!(
            Destination::File(PathBuf::from(DEFAULT_OUTPUT)).to_string(),
            "output.c"
        );
    }
}
