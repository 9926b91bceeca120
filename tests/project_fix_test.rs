use anyhow::Result;
use nuget_restore_fix::core::{fix_project_file, fix_project_source};
use nuget_restore_fix::FixError;
use tempfile::TempDir;

const LEGACY_PROJECT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <OutputType>Library</OutputType>
    <RootNamespace>Acme.BL</RootNamespace>
  </PropertyGroup>
  <ItemGroup>
    <Compile Include="Program.cs" />
  </ItemGroup>
  <Import Project="$(MSBuildToolsPath)\Microsoft.CSharp.targets" />
  <Import Project="$(SolutionDir)\.nuget\NuGet.targets" Condition="Exists('$(SolutionDir)\.nuget\NuGet.targets')" />
  <Target Name="EnsureNuGetPackageBuildImports" BeforeTargets="PrepareForBuild">
    <PropertyGroup>
      <ErrorText>This project references NuGet package(s) that are missing on this computer.</ErrorText>
    </PropertyGroup>
    <Error Condition="!Exists('$(SolutionDir)\.nuget\NuGet.targets')" Text="$([System.String]::Format('$(ErrorText)', '$(SolutionDir)\.nuget\NuGet.targets'))" />
  </Target>
</Project>"#;

const CLEAN_PROJECT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <OutputType>Exe</OutputType>
  </PropertyGroup>
  <Import Project="$(MSBuildToolsPath)\Microsoft.CSharp.targets" />
  <Target Name="BeforeBuild" />
</Project>"#;

#[test]
fn test_both_legacy_elements_are_removed() -> Result<()> {
    let (fixed, report) = fix_project_source(LEGACY_PROJECT)?;

    assert!(report.removed_import);
    assert!(report.removed_target);
    assert!(!fixed.contains(r"$(SolutionDir)\.nuget\NuGet.targets"));
    assert!(!fixed.contains("EnsureNuGetPackageBuildImports"));
    // The Target's subtree goes with it.
    assert!(!fixed.contains("ErrorText"));

    // Unrelated elements survive.
    assert!(fixed.contains(r#"<Import Project="$(MSBuildToolsPath)\Microsoft.CSharp.targets" />"#));
    assert!(fixed.contains("<RootNamespace>Acme.BL</RootNamespace>"));
    assert!(fixed.contains(r#"<Compile Include="Program.cs" />"#));
    Ok(())
}

#[test]
fn test_clean_project_is_preserved_byte_for_byte() -> Result<()> {
    let (fixed, report) = fix_project_source(CLEAN_PROJECT)?;

    assert!(!report.changed());
    assert_eq!(fixed, CLEAN_PROJECT);
    Ok(())
}

#[test]
fn test_fix_is_idempotent() -> Result<()> {
    let (first, first_report) = fix_project_source(LEGACY_PROJECT)?;
    let (second, second_report) = fix_project_source(&first)?;

    assert!(first_report.changed());
    assert!(!second_report.changed());
    assert_eq!(second, first);
    Ok(())
}

#[test]
fn test_project_with_only_the_import_element() -> Result<()> {
    let doc = r#"<Project xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <Import Project="$(SolutionDir)\.nuget\NuGet.targets" Condition="Exists('$(SolutionDir)\.nuget\NuGet.targets')" />
  <Target Name="BeforeBuild" />
</Project>"#;

    let (fixed, report) = fix_project_source(doc)?;
    assert!(report.removed_import);
    assert!(!report.removed_target);
    assert!(!fixed.contains("NuGet.targets"));
    assert!(fixed.contains(r#"<Target Name="BeforeBuild" />"#));
    Ok(())
}

#[test]
fn test_elements_outside_the_build_namespace_survive() -> Result<()> {
    let doc = r#"<Project xmlns="urn:not-msbuild">
  <Import Project="$(SolutionDir)\.nuget\NuGet.targets" />
  <Target Name="EnsureNuGetPackageBuildImports" />
</Project>"#;

    let (fixed, report) = fix_project_source(doc)?;
    assert!(!report.changed());
    assert_eq!(fixed, doc);
    Ok(())
}

#[test]
fn test_fix_project_file_rewrites_in_place() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Acme.BL.csproj");
    std::fs::write(&path, LEGACY_PROJECT)?;

    let report = fix_project_file(&path, false)?;
    assert!(report.changed());

    let on_disk = std::fs::read_to_string(&path)?;
    assert!(!on_disk.contains("EnsureNuGetPackageBuildImports"));
    assert!(!on_disk.contains(r"$(SolutionDir)\.nuget\NuGet.targets"));
    Ok(())
}

#[test]
fn test_dry_run_leaves_the_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Acme.BL.csproj");
    std::fs::write(&path, LEGACY_PROJECT)?;

    let report = fix_project_file(&path, true)?;
    assert!(report.changed());

    let on_disk = std::fs::read_to_string(&path)?;
    assert_eq!(on_disk, LEGACY_PROJECT);
    Ok(())
}

#[test]
fn test_malformed_project_file_is_a_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Broken.csproj");
    std::fs::write(&path, "<Project><PropertyGroup></Project>")?;

    let result = fix_project_file(&path, false);
    match result {
        Err(FixError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    // Parse failures must not clobber the file.
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "<Project><PropertyGroup></Project>"
    );
    Ok(())
}
