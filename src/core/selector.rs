/// Schema namespace of MSBuild 2003 project files.
pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// `Project` attribute value of the legacy restore import.
pub const NUGET_TARGETS_IMPORT: &str = r"$(SolutionDir)\.nuget\NuGet.targets";

/// `Name` attribute value of the legacy restore check target.
pub const NUGET_BUILD_IMPORTS_TARGET: &str = "EnsureNuGetPackageBuildImports";

/// Identifies at most one element to detach from a project document: tag name,
/// declared namespace, and optionally an attribute whose value must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelector {
    pub tag: &'static str,
    pub namespace: &'static str,
    pub attribute: Option<(&'static str, &'static str)>,
}

impl ElementSelector {
    /// `<Import Project="$(SolutionDir)\.nuget\NuGet.targets" ... />`
    pub fn nuget_import() -> Self {
        Self {
            tag: "Import",
            namespace: MSBUILD_NAMESPACE,
            attribute: Some(("Project", NUGET_TARGETS_IMPORT)),
        }
    }

    /// `<Target Name="EnsureNuGetPackageBuildImports" ...>...</Target>`
    pub fn nuget_target() -> Self {
        Self {
            tag: "Target",
            namespace: MSBUILD_NAMESPACE,
            attribute: Some(("Name", NUGET_BUILD_IMPORTS_TARGET)),
        }
    }

    /// Both legacy selectors, in the order they are applied to each document.
    pub fn legacy_selectors() -> [Self; 2] {
        [Self::nuget_import(), Self::nuget_target()]
    }
}
