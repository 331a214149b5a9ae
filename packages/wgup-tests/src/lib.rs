#[cfg(test)]
mod tests {

    use std::{
        io,
        sync::{Arc, Mutex},
        time::Duration,
    };
    use wgup_agent::{keepalive, provision, Agent, AgentError, CommandRunner, Config, Executor};

    /// Recording fake for the process-spawning capability. Optionally fails
    /// every command starting with `fail_on`.
    #[derive(Default)]
    struct RecordingRunner {
        commands: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl RecordingRunner {
        fn failing_on(prefix: &str) -> Self {
            Self {
                commands: Mutex::new(Vec::new()),
                fail_on: Some(prefix.to_string()),
            }
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }

        fn probes(&self) -> usize {
            self.commands()
                .iter()
                .filter(|c| c.starts_with("ping"))
                .count()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str) -> io::Result<String> {
            self.commands.lock().unwrap().push(command.to_string());
            match &self.fail_on {
                Some(prefix) if command.starts_with(prefix) => {
                    Err(io::Error::other("exit status 1"))
                }
                _ => Ok(String::new()),
            }
        }
    }

    const CONTENT: &str = r#"
[Interface]
Address = 10.0.0.1/24
PrivateKey = KEY

[Peer]
Name = p1
PublicKey = PK1
AllowedIPs = 10.0.0.2/32
Endpoint = 1.2.3.4:51820
PersistentKeepalive = 25
PingTarget = 8.8.8.8

[Peer]
Name = p2
PublicKey = PK2
AllowedIPs = 10.0.0.3/32
Endpoint = 5.6.7.8:51820
PersistentKeepalive = 0
PingTarget = 8.8.4.4
"#;

    fn eligible_peer(config: &Config) -> wgup_agent::Peer {
        config.peers[0].clone()
    }

    #[test]
    fn provisioning_runs_the_fixed_command_sequence() {
        let config = Config::from_document("wg0", CONTENT).unwrap();
        let runner = Arc::new(RecordingRunner::default());
        let executor = Executor::new(runner.clone(), false);

        provision::provision(&config, &executor).unwrap();

        assert_eq!(
            runner.commands(),
            vec![
                "ifconfig wg0 create 10.0.0.1/24",
                "echo \"KEY\" > /etc/wg/wg0",
                "wgconfig wg0 set private-key /etc/wg/wg0",
                "wgconfig wg0 add peer p1 PK1 --allowed-ips=10.0.0.2/32 --endpoint=1.2.3.4:51820",
                "wgconfig wg0 add peer p2 PK2 --allowed-ips=10.0.0.3/32 --endpoint=5.6.7.8:51820",
                "ifconfig wg0 up",
                "wgconfig wg0",
            ]
        );
    }

    #[test]
    fn dry_run_never_spawns_a_command() {
        let config = Config::from_document("wg0", CONTENT).unwrap();
        let runner = Arc::new(RecordingRunner::default());
        let executor = Executor::new(runner.clone(), true);

        provision::provision(&config, &executor).unwrap();

        assert!(runner.commands().is_empty());
    }

    #[test]
    fn provisioning_failure_halts_all_later_steps() {
        let config = Config::from_document("wg0", CONTENT).unwrap();
        let runner = Arc::new(RecordingRunner::failing_on("wgconfig wg0 set private-key"));
        let executor = Executor::new(runner.clone(), false);

        let err = provision::provision(&config, &executor).unwrap_err();

        assert!(matches!(err, AgentError::CommandFailed { .. }));
        assert_eq!(err.exit_code(), 5);
        // The failing step is the last one the runner ever saw.
        assert_eq!(
            runner.commands(),
            vec![
                "ifconfig wg0 create 10.0.0.1/24",
                "echo \"KEY\" > /etc/wg/wg0",
                "wgconfig wg0 set private-key /etc/wg/wg0",
            ]
        );
    }

    #[tokio::test]
    async fn agent_exits_cleanly_with_no_eligible_peers() {
        // p1 loses its ping target, p2 already has keepalive disabled.
        let content = CONTENT.replace("PingTarget = 8.8.8.8", "PingTarget =");
        let config = Config::from_document("wg0", &content).unwrap();
        assert!(config.peers.iter().all(|p| !p.wants_keepalive()));

        let runner = Arc::new(RecordingRunner::default());
        let agent = Agent::new(config, Executor::new(runner.clone(), false));

        agent.run().await.unwrap();

        assert_eq!(runner.probes(), 0);
        assert_eq!(runner.commands().len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn keepalive_probe_fires_once_per_interval() {
        let config = Config::from_document("wg0", CONTENT).unwrap();
        let runner = Arc::new(RecordingRunner::default());
        let executor = Executor::new(runner.clone(), false);

        let task = tokio::spawn(keepalive::run(eligible_peer(&config), executor));

        tokio::time::sleep(Duration::from_secs(24)).await;
        assert_eq!(runner.probes(), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(runner.probes(), 1);
        assert_eq!(runner.commands(), vec!["ping -c 1 8.8.8.8"]);

        tokio::time::sleep(Duration::from_secs(25)).await;
        assert_eq!(runner.probes(), 2);

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn failing_probe_terminates_the_agent() {
        let config = Config::from_document("wg0", CONTENT).unwrap();
        let runner = Arc::new(RecordingRunner::failing_on("ping"));
        let agent = Agent::new(config, Executor::new(runner.clone(), false));

        let handle = tokio::spawn(agent.run());
        tokio::time::sleep(Duration::from_secs(30)).await;

        let res = handle.await.unwrap();
        match res {
            Err(AgentError::CommandFailed { command, .. }) => {
                assert_eq!(command, "ping -c 1 8.8.8.8");
            }
            other => panic!("expected probe failure, got {other:?}"),
        }
    }
}
