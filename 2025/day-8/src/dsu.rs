/// A Disjoint Set Union (DSU) with path compression and union by size.
///
/// Points are plain indices into `parent`/`sizes`, so every set lives in the
/// two vectors and nothing is individually owned.
#[derive(Debug, Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    /// Tracks how many disjoint sets currently exist.
    num_components: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            num_components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.num_components
    }

    /// Returns the root of `i`, pointing every node on the way directly at it.
    ///
    /// Two passes instead of recursion, so deep chains cannot exhaust the stack.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Unifies sets. Returns `true` if a merge actually occurred (sets were disjoint).
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        // Smaller tree goes under the larger one; on a tie `i`'s root wins.
        let (big, small) = if self.sizes[root_i] < self.sizes[root_j] {
            (root_j, root_i)
        } else {
            (root_i, root_j)
        };
        self.parent[small] = big;
        self.sizes[big] += self.sizes[small];
        self.num_components -= 1;
        true
    }

    /// Size of the component containing `i`.
    pub fn size_of(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.sizes[root]
    }

    /// Size of every component, ordered by the first index that reaches each root.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut counts = vec![0usize; self.len()];
        let mut roots = Vec::with_capacity(self.num_components);

        for i in 0..self.len() {
            let root = self.find(i);
            if counts[root] == 0 {
                roots.push(root);
            }
            counts[root] += 1;
        }

        roots.into_iter().map(|root| counts[root]).collect()
    }
}
