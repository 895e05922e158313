use crate::domain::{rank_of, Task};

#[derive(Debug)]
struct Node<'a> {
    rank: u8,
    task: &'a Task,
    left: Option<Box<Node<'a>>>,
    right: Option<Box<Node<'a>>>,
}

impl<'a> Node<'a> {
    fn new(rank: u8, task: &'a Task) -> Self {
        Self {
            rank,
            task,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree over borrowed tasks, keyed by priority rank.
///
/// Equal ranks descend to the right, so an in-order walk yields tasks in
/// ascending rank with ties in insertion order.
#[derive(Debug, Default)]
pub struct PriorityIndex<'a> {
    root: Option<Box<Node<'a>>>,
    len: usize,
}

impl<'a> PriorityIndex<'a> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Build a fresh index over every task, in iteration order
    pub fn build<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut index = Self::new();
        for task in tasks {
            index.insert(rank_of(task.priority()), task);
        }
        index
    }

    pub fn insert(&mut self, rank: u8, task: &'a Task) {
        insert_at(&mut self.root, rank, task);
        self.len += 1;
    }

    /// Left, self, right
    pub fn in_order(&self) -> Vec<&'a Task> {
        let mut result = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut result);
        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn insert_at<'a>(slot: &mut Option<Box<Node<'a>>>, rank: u8, task: &'a Task) {
    match slot {
        Some(node) if rank < node.rank => insert_at(&mut node.left, rank, task),
        Some(node) => insert_at(&mut node.right, rank, task),
        None => *slot = Some(Box::new(Node::new(rank, task))),
    }
}

fn walk<'a>(node: Option<&Node<'a>>, out: &mut Vec<&'a Task>) {
    if let Some(node) = node {
        walk(node.left.as_deref(), out);
        out.push(node.task);
        walk(node.right.as_deref(), out);
    }
}
