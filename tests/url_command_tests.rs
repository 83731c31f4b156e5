use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod url_command_tests {
    use super::*;

    #[test]
    fn test_github_live_link_single_line() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "--line", "3"])
            .assert()
            .success()
            .stdout("https://github.com/owner/repo/blob/main/src/lib.rs#L3\n");

        Ok(())
    }

    #[test]
    fn test_github_permalink_range() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        let commit = head_commit(&repo.path)?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "--line", "2-4", "--permalink"])
            .assert()
            .success()
            .stdout(format!(
                "https://github.com/owner/repo/blob/{commit}/src/lib.rs#L2-L4\n"
            ));

        Ok(())
    }

    #[test]
    fn test_bitbucket_live_link() -> anyhow::Result<()> {
        let repo = create_bitbucket_repo()?;
        let commit = head_commit(&repo.path)?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "-l", "2:3"])
            .assert()
            .success()
            .stdout(format!(
                "https://bitbucket.org/team/repo/src/{commit}/src/lib.rs?at=main#lines-2:3\n"
            ));

        Ok(())
    }

    #[test]
    fn test_bitbucket_permalink_keeps_branch() -> anyhow::Result<()> {
        let repo = create_bitbucket_repo()?;
        let commit = head_commit(&repo.path)?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "-l", "2", "--permalink"])
            .assert()
            .success()
            .stdout(format!(
                "https://bitbucket.org/team/repo/src/{commit}/src/lib.rs?at=main#lines-2\n"
            ));

        Ok(())
    }

    #[test]
    fn test_default_line_is_one() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("#L1\n"));

        Ok(())
    }

    #[test]
    fn test_file_from_subdirectory() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        permalink_cmd(&repo)?
            .current_dir(repo.path.join("src"))
            .args(["url", "lib.rs", "--line", "1"])
            .assert()
            .success()
            .stdout("https://github.com/owner/repo/blob/main/src/lib.rs#L1\n");

        Ok(())
    }

    #[test]
    fn test_detached_head_uses_commit() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        let commit = head_commit(&repo.path)?;
        git(&repo.path, &["checkout", "--detach"])?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("/blob/{commit}/")));

        Ok(())
    }

    #[test]
    fn test_preferred_remote_override() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        add_remote(&repo.path, "fork", "https://github.com/me/repo.git")?;

        permalink_cmd(&repo)?
            .args(["--remote", "fork", "url", "src/lib.rs"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("https://github.com/me/repo/"));

        Ok(())
    }

    #[test]
    fn test_preferred_remote_from_config() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        add_remote(&repo.path, "fork", "https://github.com/me/repo.git")?;
        write_config(&repo, r#"{ "preferredRemoteName": "fork" }"#)?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("https://github.com/me/repo/"));

        Ok(())
    }

    #[test]
    fn test_modified_file_warns_but_succeeds() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        create_file(&repo.path, "src/lib.rs", "changed\n")?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("/blob/main/src/lib.rs#L1"))
            .stderr(assertions::has_warning("local modifications"));

        Ok(())
    }

    #[test]
    fn test_untracked_file_fails() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        create_file(&repo.path, "new.rs", "fn main() {}\n")?;

        permalink_cmd(&repo)?
            .args(["url", "new.rs"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(assertions::untracked_file());

        Ok(())
    }

    #[test]
    fn test_no_remotes_fails() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs"])
            .assert()
            .failure()
            .stderr(assertions::no_remotes());

        Ok(())
    }

    #[test]
    fn test_no_file_fails() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        permalink_cmd(&repo)?
            .arg("url")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No active file"));

        Ok(())
    }

    #[test]
    fn test_outside_git_repository_fails() -> anyhow::Result<()> {
        let repo = create_github_repo()?;
        let outside = tempfile::TempDir::new()?;
        let loose = outside.path().join("loose.txt");
        std::fs::write(&loose, "x")?;

        permalink_cmd(&repo)?
            .arg("url")
            .arg(&loose)
            .assert()
            .failure()
            .stderr(assertions::not_in_git_repo());

        Ok(())
    }

    #[test]
    fn test_invalid_line_selection_fails() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "--line", "abc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid line selection"));

        Ok(())
    }

    #[test]
    fn test_custom_template() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        permalink_cmd(&repo)?
            .args([
                "--template",
                r"https://x/{username}/{folderName}/{ref}/{filepath}#{lineGithub}\{kept\}",
                "url",
                "src/lib.rs",
                "--line",
                "2-3",
            ])
            .assert()
            .success()
            .stdout("https://x/TestUser/project/main/src/lib.rs#L2-L3\\{kept\\}\n");

        Ok(())
    }

    #[test]
    fn test_custom_template_from_config_without_remotes() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        write_config(
            &repo,
            r#"{ "customUrl": { "enabled": true, "template": "https://x/{ref}#{lineBitbucket}" } }"#,
        )?;

        permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "--line", "4"])
            .assert()
            .success()
            .stdout("https://x/main#4\n");

        Ok(())
    }

    #[test]
    fn test_repeated_runs_are_identical() -> anyhow::Result<()> {
        let repo = create_github_repo()?;

        let first = permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "--line", "2-3"])
            .output()?;
        let second = permalink_cmd(&repo)?
            .args(["url", "src/lib.rs", "--line", "2-3"])
            .output()?;

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);

        Ok(())
    }
}
