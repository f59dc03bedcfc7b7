use std::process::ExitCode;

fn main() -> ExitCode {
    modpack_changelog_lib::run()
}
