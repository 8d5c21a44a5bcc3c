use assert_cmd::Command;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FIXTURE_SHEET: &str = "\
Timestamp,Nombre del Café,Calificación Total,Calificación Flat White,Latitud,Longitud,Workable
,Café Estelar,9.6,9.0,20.6766,-103.3704,Yes
,La Ideal,8.1,,20.6669,-103.3918,no
,Norte,,7.2,20.7214,-103.3918,yes
";

/// Hermetic CLI fixture: a temp dir holding the source CSV and a config
/// path that does not exist, so runs never touch the user's real config.
pub struct TestFixture {
    temp_dir: TempDir,
    pub csv_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let csv_path = temp_dir.path().join("cafes.csv");
        let mut file = std::fs::File::create(&csv_path).expect("Failed to create fixture CSV");
        write!(file, "{}", FIXTURE_SHEET).expect("Failed to write fixture CSV");
        Self { temp_dir, csv_path }
    }

    /// Command with hermetic config but no source override (bundled list)
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cafemap").expect("binary exists");
        cmd.arg("--config")
            .arg(self.temp_dir.path().join("config.toml"));
        cmd
    }

    /// Command reading the fixture CSV
    pub fn command_with_source(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--source").arg(&self.csv_path);
        cmd
    }

    pub fn json_output(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command_with_source()
            .args(args)
            .output()
            .expect("Failed to run cafemap");
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
    }
}
