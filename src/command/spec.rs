use crate::resp::Value;

pub struct CommandSpec {
    pub arg_count: i32,
    pub flags: &'static [&'static str],
    pub first_key: i32,
    pub last_key: i32,
    pub steps: i32,
    pub acl_categories: &'static [&'static str],
}

impl CommandSpec {
    // positive arg_count is exact token count, negative means "at least |arg_count|"
    pub fn matches_arity(&self, token_count: usize) -> bool {
        if self.arg_count >= 0 {
            token_count == self.arg_count as usize
        } else {
            token_count >= (-self.arg_count) as usize
        }
    }

    pub fn to_value(&self, name: &str) -> Value {
        let flags = self.flags.iter().map(|f| Value::bulk(*f)).collect();
        let acl = self.acl_categories.iter().map(|c| Value::bulk(*c)).collect();
        Value::array(vec![
            Value::bulk(name),
            Value::Integer(self.arg_count as i64),
            Value::array(flags),
            Value::Integer(self.first_key as i64),
            Value::Integer(self.last_key as i64),
            Value::Integer(self.steps as i64),
            Value::array(acl),
        ])
    }
}

pub struct CommandDoc {
    pub summary: &'static str,
    pub since: &'static str,
    pub group: &'static str,
    pub complexity: &'static str,
}

impl CommandDoc {
    pub fn to_value(&self, name: &str) -> Value {
        let doc_map = Value::array(vec![
            Value::bulk("summary"),
            Value::bulk(self.summary),
            Value::bulk("since"),
            Value::bulk(self.since),
            Value::bulk("group"),
            Value::bulk(self.group),
            Value::bulk("complexity"),
            Value::bulk(self.complexity),
        ]);
        Value::array(vec![Value::bulk(name), doc_map])
    }
}
