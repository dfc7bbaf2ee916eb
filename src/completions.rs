use crate::cli::Shell;

pub fn script(shell: Shell) -> &'static str {
    match shell {
        Shell::Zsh => ZSH_SCRIPT,
    }
}

const ZSH_SCRIPT: &str = r#"#compdef pmdetect

_pmdetect() {
  local context state state_descr line

  _arguments -C \
    '(-v --verbose)'{-v,--verbose}'[Log detection details]' \
    '1:command:->cmds' \
    '*::arg:->args'

  case $state in
    cmds)
      _values 'command' \
        'help[Print usage]' \
        'detect[Print the package manager used in a directory]' \
        'add[Print the add command for the detected manager]' \
        'list[List known package managers]' \
        'completions[Generate zsh completions]'
      return
      ;;
    args)
      case $words[1] in
        detect)
          _arguments -C \
            '(-C --dir)'{-C,--dir=}'[Project directory]:dir:_directories' \
            '--fallback=[Manager when no lockfile is found]:manager:(npm pnpm yarn)' \
            '(--json)--index[Print the registry index]' \
            '(--index)--json[Print JSON]'
          return
          ;;
        add)
          _arguments -C \
            '(-C --dir)'{-C,--dir=}'[Project directory]:dir:_directories' \
            '--fallback=[Manager when no lockfile is found]:manager:(npm pnpm yarn)' \
            '*:package:'
          return
          ;;
        list)
          _arguments '--json[Print JSON]'
          return
          ;;
        completions)
          _arguments '1:shell:(zsh)'
          return
          ;;
      esac
      ;;
  esac
}

_pmdetect "$@"
"#;
