use anyhow::Context;
use extdev_core::io;

/// Files older releases of the scaffolding shipped that should no
/// longer exist in an extension.
const OBSOLETE: [&str; 2] = ["_test/general.test.php", ".travis.yml"];

pub fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;

    for file in OBSOLETE {
        if io::delete_file(&cwd.join(file))? {
            println!("  deleted: {file}");
        }
    }

    Ok(())
}
