use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Every expected value at or below this percentage makes a task low-work.
pub const LOW_WORK_CEILING: f64 = 30.0;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Task {
    pub id: u32,
    pub name: String,
    /// Expected resource profile, in percent
    pub expected_cpu: f64,
    pub expected_gpu: f64,
    pub expected_mem: f64,
}

impl Task {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        expected_cpu: f64,
        expected_gpu: f64,
        expected_mem: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            expected_cpu,
            expected_gpu,
            expected_mem,
        }
    }

    /// A task whose expected CPU, GPU and memory are all at most 30%.
    pub fn is_low_work(&self) -> bool {
        self.expected_cpu <= LOW_WORK_CEILING
            && self.expected_gpu <= LOW_WORK_CEILING
            && self.expected_mem <= LOW_WORK_CEILING
    }
}

/// Read-only task table. Iteration order is insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    pub fn new(tasks: Vec<Task>) -> anyhow::Result<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                anyhow::bail!("Duplicate task id {} ({})", task.id, task.name);
            }
        }
        Ok(Self { tasks })
    }

    /// The catalog the dashboard ships with.
    pub fn builtin() -> Self {
        Self {
            tasks: vec![
                Task::new(1, "Render", 85.0, 95.0, 70.0),
                Task::new(2, "Clean Data", 40.0, 10.0, 30.0),
                Task::new(3, "Train Model", 90.0, 90.0, 80.0),
                Task::new(4, "Browse", 15.0, 5.0, 15.0),
            ],
        }
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = TaskCatalog::builtin();
        let names: Vec<_> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Render", "Clean Data", "Train Model", "Browse"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = TaskCatalog::builtin();
        assert_eq!(catalog.get(3).map(|t| t.name.as_str()), Some("Train Model"));
        assert!(catalog.get(0).is_none());
        assert!(!catalog.contains(99));
    }

    #[test]
    fn test_low_work_classification() {
        let catalog = TaskCatalog::builtin();
        let low: Vec<_> = catalog.iter().filter(|t| t.is_low_work()).map(|t| t.id).collect();
        assert_eq!(low, vec![4]);
    }

    #[test]
    fn test_low_work_boundary_is_inclusive() {
        assert!(Task::new(1, "edge", 30.0, 30.0, 30.0).is_low_work());
        assert!(!Task::new(2, "over", 30.0, 30.01, 30.0).is_low_work());
        // Clean Data sits exactly on the memory ceiling but CPU is too high
        assert!(!Task::new(3, "Clean Data", 40.0, 10.0, 30.0).is_low_work());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = TaskCatalog::new(vec![
            Task::new(1, "a", 1.0, 1.0, 1.0),
            Task::new(1, "b", 2.0, 2.0, 2.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_list() {
        let catalog = TaskCatalog::new(vec![Task::new(7, "Browse", 15.0, 5.0, 15.0)]).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["name"], "Browse");
    }
}
