/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! All targets of a build, grouped by workspace and package.
//!
//! Entries are only ever added. Packages must be registered before targets
//! can be added to them, and target names are unique within a package.

use bazel2x_core::label::Label;
use bazel2x_core::label::PackageName;
use bazel2x_core::label::TargetName;
use bazel2x_core::label::WorkspaceName;
use starlark_map::small_map::Entry;
use starlark_map::small_map::SmallMap;

use crate::nodes::Target;

#[derive(Debug, thiserror::Error)]
pub enum TargetsError {
    #[error("Package `{0}{1}` registered twice")]
    RegisteredPackageTwice(WorkspaceName, PackageName),
    #[error("Cannot add target `{0}`: its package was never registered")]
    UnknownPackage(Label),
    #[error("Target `{0}` already exists")]
    RegisteredTargetTwice(Label),
    #[error("Cannot add target with invalid label `{0}`")]
    InvalidLabel(Label),
}

/// Targets of one package, in declaration order.
#[derive(Debug, Default)]
pub struct PackageTargets {
    targets: SmallMap<TargetName, Target>,
}

impl PackageTargets {
    pub fn get(&self, name: &TargetName) -> Option<&Target> {
        self.targets.get(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TargetName, &Target)> {
        self.targets.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }
}

/// Packages of one workspace, in registration order.
#[derive(Debug, Default)]
pub struct WorkspaceTargets {
    packages: SmallMap<PackageName, PackageTargets>,
}

impl WorkspaceTargets {
    pub fn get(&self, package: &PackageName) -> Option<&PackageTargets> {
        self.packages.get(package)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &PackageTargets)> {
        self.packages.iter()
    }
}

/// Every target of a build.
#[derive(Debug, Default)]
pub struct BuildTargets {
    workspaces: SmallMap<WorkspaceName, WorkspaceTargets>,
}

impl BuildTargets {
    pub fn new() -> BuildTargets {
        BuildTargets::default()
    }

    /// Start a package. Must happen before any of its targets is added.
    pub fn add_package(
        &mut self,
        workspace: &WorkspaceName,
        package: &PackageName,
    ) -> anyhow::Result<()> {
        let packages = &mut self
            .workspaces
            .entry(workspace.clone())
            .or_default()
            .packages;
        match packages.entry(package.clone()) {
            Entry::Occupied(_) => Err(TargetsError::RegisteredPackageTwice(
                workspace.clone(),
                package.clone(),
            )
            .into()),
            Entry::Vacant(e) => {
                e.insert(PackageTargets::default());
                Ok(())
            }
        }
    }

    /// Add a target to its (already registered) package.
    pub fn add(&mut self, target: Target) -> anyhow::Result<()> {
        let label = target.label().clone();
        if !label.is_valid() {
            return Err(TargetsError::InvalidLabel(label).into());
        }
        let package = match self
            .workspaces
            .get_mut(&label.workspace)
            .and_then(|w| w.packages.get_mut(&label.package))
        {
            Some(package) => package,
            None => return Err(TargetsError::UnknownPackage(label).into()),
        };
        match package.targets.entry(label.target.clone()) {
            Entry::Occupied(_) => Err(TargetsError::RegisteredTargetTwice(label).into()),
            Entry::Vacant(e) => {
                e.insert(target);
                Ok(())
            }
        }
    }

    pub fn workspace(&self, workspace: &WorkspaceName) -> Option<&WorkspaceTargets> {
        self.workspaces.get(workspace)
    }

    pub fn package(
        &self,
        workspace: &WorkspaceName,
        package: &PackageName,
    ) -> Option<&PackageTargets> {
        self.workspace(workspace)?.get(package)
    }

    /// Look up a target by its exact label.
    pub fn get(&self, label: &Label) -> Option<&Target> {
        self.package(&label.workspace, &label.package)?
            .get(&label.target)
    }

    pub fn workspaces(&self) -> impl Iterator<Item = (&WorkspaceName, &WorkspaceTargets)> {
        self.workspaces.iter()
    }

    /// All targets, package by package, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.workspaces
            .values()
            .flat_map(|w| w.packages.values())
            .flat_map(|p| p.targets.values())
    }
}
